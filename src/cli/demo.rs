use std::{collections::HashMap, hash::RandomState};

use tally::sum::{SumValues, sum_floats, sum_ints, sum_numbers};

/// Sum the sample maps and render one line per flavour of the call.
pub fn render() -> [String; 4] {
    let ints: HashMap<String, i64> =
        HashMap::from([("first".to_string(), 34), ("second".to_string(), 12)]);
    let floats: HashMap<String, f64> =
        HashMap::from([("first".to_string(), 35.98), ("second".to_string(), 26.99)]);

    [
        format!("Non-Generic Sums: {} and {}", sum_ints(&ints), sum_floats(&floats)),
        format!(
            "Generic Sums: {} and {}",
            sum_numbers::<String, i64, RandomState>(&ints),
            sum_numbers::<String, f64, RandomState>(&floats),
        ),
        format!(
            "Generic Sums, type parameters inferred: {} and {}",
            sum_numbers(&ints),
            sum_numbers(&floats),
        ),
        format!(
            "Generic Sums with Constraint: {} and {}",
            ints.iter().map(|(key, value)| (key, *value)).sum_values(),
            floats.iter().map(|(key, value)| (key, *value)).sum_values(),
        ),
    ]
}

pub fn run() {
    for line in render() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(
            render(),
            [
                "Non-Generic Sums: 46 and 62.97",
                "Generic Sums: 46 and 62.97",
                "Generic Sums, type parameters inferred: 46 and 62.97",
                "Generic Sums with Constraint: 46 and 62.97",
            ],
        );
    }
}
