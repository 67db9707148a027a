/// Renders a number the way the language prints it: shortest round-trip
/// decimal text, with a trailing `.0` dropped for whole numbers.
pub(crate) fn format_number(number: f64) -> String {
    let text = format!("{:?}", number);

    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod test {
    use super::format_number;

    #[test]
    fn whole_numbers_drop_fraction() {
        let test_data = vec![
            (3.0, "3"),
            (3.5, "3.5"),
            (-2.0, "-2"),
            (0.0, "0"),
            (-0.0, "-0"),
            (0.1 + 0.2, "0.30000000000000004"),
            (f64::INFINITY, "inf"),
        ];

        test_data.into_iter().for_each(|(number, expected)| {
            assert_eq!(format_number(number), expected);
        });
    }
}
