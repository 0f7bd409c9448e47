// crates/usecase/src/tool.rs

/// The report tools shipped as separate binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// COUNT / MEAN / MEDIAN / MODE / SD / VARIANCE of a list of numbers.
    Statistics,
    /// Binary and hexadecimal renderings of a list of integers.
    BaseConversion,
    /// Occurrence counts of whitespace-delimited words.
    WordCount,
}

impl Tool {
    pub const ALL: [Self; 3] = [Self::Statistics, Self::BaseConversion, Self::WordCount];

    pub const fn binary_name(self) -> &'static str {
        match self {
            Self::Statistics => "compute_statistics",
            Self::BaseConversion => "convert_numbers",
            Self::WordCount => "word_count",
        }
    }

    pub const fn about(self) -> &'static str {
        match self {
            Self::Statistics => "Descriptive statistics of the numbers in a file, one per line",
            Self::BaseConversion => "Binary and hexadecimal conversion of the integers in a file",
            Self::WordCount => "Frequency of each whitespace-delimited word in a file",
        }
    }

    pub fn usage(self) -> String {
        format!("Usage: {} input_file.txt", self.binary_name())
    }

    pub const fn no_data_message(self) -> &'static str {
        match self {
            Self::Statistics => "No valid numeric data found.",
            Self::BaseConversion => "No valid integer data found.",
            Self::WordCount => "No valid data found.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_names_the_binary() {
        assert_eq!(Tool::WordCount.usage(), "Usage: word_count input_file.txt");
    }

    #[test]
    fn binary_names_are_distinct() {
        let mut names: Vec<_> = Tool::ALL.iter().map(|t| t.binary_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Tool::ALL.len());
    }
}
