//! User-facing copy of the interactive protocol.

pub const INDEPENDENT_NAME: &str = "What is the name of your independent variable? \
    Type ? if you need directions or ! at any time to end the program";

pub const INDEPENDENT_NAME_AGAIN: &str = "What is the name of your independent variable?";

pub const DEPENDENT_NAME: &str = "What is the name of your dependent variable?";

pub const HELP: &str = "\
Suppose you have two things that are related, for example
height (independent variable) and shoe size (dependent variable). You
then collect data for a number of people, including their height and
shoe size. Using this data, it is possible to then develop an equation
that will predict someone's shoe size based on their height. This
prediction may or may not be completely accurate, depending on the true
quantitative relationship between the two things, of course. Now to
the point of this program: using it, you can provide data for two
related things and the program will predict the value of one based
on the value of the other. So, let's try this again...";

pub const EMPTY_NAME: &str = "The name cannot be empty.";

pub const DEGENERATE: &str = "Your data does not support a unique prediction: \
    the independent values must not all be the same.";

pub fn data(name: &str) -> String {
    format!(
        "Please provide a set of data, with one entry per line, for {}. \
        Enter a . on the last line to continue",
        name,
    )
}

pub fn predict(independent: &str, dependent: &str) -> String {
    format!(
        "Provide a value for {}, and I'll predict a value for {}. \
        Or if you are finished and want to end the program type !",
        independent, dependent,
    )
}

pub fn prediction(dependent: &str, value: f64) -> String {
    format!("I predict that {} will be {:.6}", dependent, value)
}

pub fn rejected(token: &str) -> String {
    format!("`{}` is not a number, please try again.", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_ok() {
        assert_eq!(prediction("shoe size", 10.0), "I predict that shoe size will be 10.000000");
    }

    #[test]
    fn data_ok() {
        assert!(data("height").contains(" for height. "));
    }
}
