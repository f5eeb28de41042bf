use super::*;

#[test]
fn svg_number_drops_trailing_zeros() {
    assert_eq!(svg_number(250.0), "250");
    assert_eq!(svg_number(57.7226), "57.723");
    assert_eq!(svg_number(100.5), "100.5");
}

#[test]
fn svg_number_keeps_integer_zeros() {
    assert_eq!(svg_number(500.0), "500");
    assert_eq!(svg_number(0.0), "0");
}

#[test]
fn svg_number_non_finite_is_zero() {
    assert_eq!(svg_number(f64::NAN), "0");
    assert_eq!(svg_number(f64::INFINITY), "0");
}

#[test]
fn svg_number_tiny_negative_is_zero() {
    assert_eq!(svg_number(-0.0001), "0");
}
