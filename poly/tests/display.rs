use poly::polynomial::Polynomial;

#[test]
fn display() {
    sub_test("test_degree", test_degree);
    sub_test("test_zero_polynomial", test_zero_polynomial);
    sub_test("test_constant", test_constant);
    sub_test(
        "test_degree_one_coefficient_is_literal",
        test_degree_one_coefficient_is_literal,
    );
    sub_test("test_unit_coefficient_omitted", test_unit_coefficient_omitted);
    sub_test("test_zero_terms_skipped", test_zero_terms_skipped);
    sub_test("test_float_coefficients", test_float_coefficients);
    sub_test("test_debug_reconstruction", test_debug_reconstruction);
}

fn sub_test<F: FnOnce()>(name: &str, f: F) {
    println!("Running {}", name);
    f();
}

fn test_degree() {
    assert_eq!(Polynomial::new(vec![7]).degree(), 0);
    assert_eq!(Polynomial::new(vec![1, 2]).degree(), 1);
    // Trailing zeros count towards the stored degree.
    assert_eq!(Polynomial::new(vec![1, 2, 0, 0]).degree(), 3);
}

fn test_zero_polynomial() {
    assert_eq!(Polynomial::new(vec![0]).to_string(), "0");
    assert_eq!(Polynomial::new(vec![0, 0, 0]).to_string(), "0");
}

fn test_constant() {
    assert_eq!(Polynomial::new(vec![1]).to_string(), "1");
    assert_eq!(Polynomial::new(vec![-4]).to_string(), "-4");
}

fn test_degree_one_coefficient_is_literal() {
    // The degree 1 term always spells out its coefficient, unlike the
    // higher degree terms.
    assert_eq!(Polynomial::new(vec![0, 1]).to_string(), "1x");
    assert_eq!(Polynomial::new(vec![3, 2, 1]).to_string(), "x^2 + 2x + 3");
}

fn test_unit_coefficient_omitted() {
    assert_eq!(Polynomial::new(vec![3, 2, 5]).to_string(), "5x^2 + 2x + 3");
    assert_eq!(Polynomial::new(vec![0, 0, 0, 1]).to_string(), "x^3");
    // Only a coefficient of exactly 1 is omitted.
    assert_eq!(Polynomial::new(vec![0, 0, -1]).to_string(), "-1x^2");
}

fn test_zero_terms_skipped() {
    assert_eq!(Polynomial::new(vec![0, 0, 7]).to_string(), "7x^2");
    assert_eq!(Polynomial::new(vec![5, 0, 1]).to_string(), "x^2 + 5");
    assert_eq!(
        Polynomial::new(vec![0, 3, 0, 0, 2]).to_string(),
        "2x^4 + 3x"
    );
}

fn test_float_coefficients() {
    assert_eq!(
        Polynomial::new(vec![0.5, 1.5]).to_string(),
        "1.5x + 0.5"
    );
    assert_eq!(Polynomial::new(vec![0.0, 0.0, 1.0]).to_string(), "x^2");
    assert_eq!(Polynomial::new(vec![0.0]).to_string(), "0");
}

fn test_debug_reconstruction() {
    let a: Polynomial<i64> = Polynomial::new(vec![1, 2, 3]);

    // The debug form reads as the constructor call that rebuilds the value.
    assert_eq!(format!("{:?}", a), "Polynomial([1, 2, 3])");
    assert_eq!(a, Polynomial::new(vec![1, 2, 3]));
}
