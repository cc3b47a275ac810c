//! Canonical end-to-end table: input → rendered expression → rendered
//! value, through the whole parse/evaluate/format pipeline.
//!
//! One row per scenario the calculator is expected to hold stable:
//! every operator spelling, sign placement, compact and spaced forms,
//! leading zeros, and comma grouping on both operands and results.

use centum_format::{format_expression, format_value};
use centum_parser::parse;

/// (input, rendered expression, rendered value)
const CASES: &[(&str, &str, &str)] = &[
    // +
    ("55 + 55", "55 + 55%", "85.25"),
    ("703.4 + 273.555%", "703.4 + 273.555%", "2,627.59"),
    ("-703.4 + 273.555%", "-703.4 + 273.555%", "-2,627.59"),
    ("-703.4 + -273.555%", "-703.4 + -273.555%", "1,220.79"),
    ("703.4 + -273.555%", "703.4 + -273.555%", "-1,220.79"),
    // -
    ("100 -50%", "100 - 50%", "50"),
    ("77 - 77", "77 - 77%", "17.71"),
    ("-100 --70.3", "-100 - -70.3%", "-170.3"),
    ("102340 - 200", "102,340 - 200%", "-102,340"),
    ("803 - -800%", "803 - -800%", "7,227"),
    // ×
    ("50 * 10", "50 × 10%", "250"),
    ("-30 X-10%", "-30 × -10%", "-90"),
    ("850 x 25.5", "850 × 25.5%", "184,237.5"),
    ("0100000 * 0000300000", "100,000 × 300,000%", "30,000,000,000,000"),
    ("-111*10%", "-111 × 10%", "1,232.1"),
    // ÷
    ("10 / 10", "10 ÷ 10%", "10"),
    ("-80/-10%", "-80 ÷ -10%", "-10"),
    ("10023.23 / 11.2", "10,023.23 ÷ 11.2%", "8.93"),
    ("7/-7", "7 ÷ -7%", "-14.29"),
    ("5/2.5", "5 ÷ 2.5%", "40"),
    // of
    ("50%of100", "50% of 100", "50"),
    ("80of-20", "80% of -20", "-16"),
    ("200% OF 10", "200% of 10", "20"),
    ("500000 oF 30", "500,000% of 30", "150,000"),
    ("-40Of000038", "-40% of 38", "-15.2"),
    // in
    ("15 in 30", "15 in 30", "50%"),
    ("-850IN-730", "-850 in -730", "116.44%"),
    ("88888iN-99999", "88,888 in -99,999", "-88.89%"),
    ("-007In 10", "-7 in 10", "-70%"),
    ("708 in1000", "708 in 1,000", "70.8%"),
];

#[test]
fn canonical_table() {
    for &(input, want_expr, want_value) in CASES {
        let expr = parse(input).unwrap_or_else(|e| panic!("'{input}' should parse: {e}"));
        assert_eq!(
            format_expression(&expr),
            want_expr,
            "expression rendering for '{input}'"
        );
        assert_eq!(
            format_value(&expr),
            want_value,
            "value rendering for '{input}'"
        );
    }
}

#[test]
fn division_by_zero_renders_its_message() {
    let expr = parse("15 in 0").unwrap();
    assert_eq!(format_expression(&expr), "15 in 0");
    assert_eq!(format_value(&expr), "division by zero");
}
