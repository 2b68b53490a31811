//! Typed records for the C++ functions catalog

use crate::record::{CellValue, Column, Record};
use std::fmt;

/// C++ standard revision that introduced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Standard {
    /// C++98
    Cpp98,
    /// C++11
    Cpp11,
    /// C++14
    Cpp14,
    /// C++17
    Cpp17,
    /// C++20
    Cpp20,
    /// C++23
    Cpp23,
}

impl Standard {
    /// Display label, e.g. `C++17`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpp98 => "C++98",
            Self::Cpp11 => "C++11",
            Self::Cpp14 => "C++14",
            Self::Cpp17 => "C++17",
            Self::Cpp20 => "C++20",
            Self::Cpp23 => "C++23",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One algorithm or member function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Qualified algorithm name, or the bare method name for member functions
    pub name: &'static str,
    /// Owning container for member functions
    pub container: Option<&'static str>,
    /// Header(s) to include
    pub header: &'static str,
    /// Free-form classification
    pub category: &'static str,
    /// Time complexity in asymptotic notation
    pub time_complexity: &'static str,
    /// Auxiliary space complexity
    pub space_complexity: &'static str,
    /// Parameter list
    pub arguments: &'static str,
    /// Per-argument explanation
    pub arg_explanation: &'static str,
    /// Return type
    pub return_type: &'static str,
    /// What it does
    pub description: &'static str,
    /// Usage guidance
    pub when_to_use: &'static str,
    /// Anti-usage guidance
    pub when_not_to_use: &'static str,
    /// Real-world usage frequency, 1..=10
    pub real_world_freq: u8,
    /// Competitive programming usage frequency, 1..=10
    pub competitive_freq: u8,
    /// Illustrative snippet
    pub example: &'static str,
    /// Additional notes
    pub notes: Option<&'static str>,
    /// Standard that introduced it
    pub since: Standard,
    /// Related entries, free text
    pub related: &'static str,
}

/// Columns of an [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Name,
    Container,
    Header,
    Category,
    TimeComplexity,
    SpaceComplexity,
    Arguments,
    ArgExplanation,
    ReturnType,
    Description,
    WhenToUse,
    WhenNotToUse,
    RealWorldFreq,
    CompetitiveFreq,
    Example,
    Notes,
    Since,
    Related,
}

impl Record for Entry {
    type Field = EntryField;

    fn label(&self) -> &str {
        self.name
    }

    fn value(&self, field: EntryField) -> Option<CellValue<'_>> {
        let text = match field {
            EntryField::Name => self.name,
            EntryField::Container => return self.container.map(CellValue::Text),
            EntryField::Header => self.header,
            EntryField::Category => self.category,
            EntryField::TimeComplexity => self.time_complexity,
            EntryField::SpaceComplexity => self.space_complexity,
            EntryField::Arguments => self.arguments,
            EntryField::ArgExplanation => self.arg_explanation,
            EntryField::ReturnType => self.return_type,
            EntryField::Description => self.description,
            EntryField::WhenToUse => self.when_to_use,
            EntryField::WhenNotToUse => self.when_not_to_use,
            EntryField::RealWorldFreq => return Some(CellValue::Score(self.real_world_freq)),
            EntryField::CompetitiveFreq => return Some(CellValue::Score(self.competitive_freq)),
            EntryField::Example => self.example,
            EntryField::Notes => return self.notes.map(CellValue::Text),
            EntryField::Since => self.since.label(),
            EntryField::Related => self.related,
        };
        Some(CellValue::Text(text))
    }
}

/// Columns shared by the algorithm and member-function sheets, after the
/// leading identifier columns.
macro_rules! entry_detail_columns {
    ($($lead:expr),* $(,)?) => {
        &[
            $($lead,)*
            Column::required(EntryField::Header, "Header"),
            Column::required(EntryField::Category, "Category"),
            Column::required(EntryField::TimeComplexity, "Time Complexity"),
            Column::required(EntryField::SpaceComplexity, "Space Complexity"),
            Column::required(EntryField::Arguments, "Arguments"),
            Column::required(EntryField::ArgExplanation, "Argument Notes"),
            Column::required(EntryField::ReturnType, "Return Type"),
            Column::required(EntryField::Description, "Description"),
            Column::required(EntryField::WhenToUse, "When To Use"),
            Column::required(EntryField::WhenNotToUse, "When Not To Use"),
            Column::required(EntryField::RealWorldFreq, "Real-World Freq"),
            Column::required(EntryField::CompetitiveFreq, "DSA/LeetCode Freq"),
            Column::required(EntryField::Example, "Example"),
            Column::optional(EntryField::Notes, "Notes"),
            Column::required(EntryField::Since, "Since"),
            Column::required(EntryField::Related, "Related"),
        ]
    };
}

/// Schema of the algorithms sheet.
pub const ALGORITHM_COLUMNS: &[Column<EntryField>] =
    entry_detail_columns![Column::required(EntryField::Name, "Function")];

/// Schema of the member-function sheets.
pub const METHOD_COLUMNS: &[Column<EntryField>] = entry_detail_columns![
    Column::required(EntryField::Container, "Container"),
    Column::required(EntryField::Name, "Method"),
];

/// Quick-reference row for containers without a dedicated sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSummary {
    /// Container name, e.g. `deque`
    pub name: &'static str,
    /// Header to include
    pub header: &'static str,
    /// Sequence, adapter or associative
    pub kind: &'static str,
    /// Most used member functions
    pub key_methods: &'static str,
    /// Typical use case
    pub use_case: &'static str,
    /// Container it is usually weighed against
    pub compared_with: &'static str,
    /// Trade-offs against `compared_with`
    pub tradeoffs: &'static str,
    /// Real-world usage frequency, 1..=10
    pub real_world_freq: u8,
    /// Competitive programming usage frequency, 1..=10
    pub competitive_freq: u8,
    /// Additional notes
    pub notes: Option<&'static str>,
    /// Standard that introduced it
    pub since: Standard,
}

/// Columns of a [`ContainerSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    Name,
    Header,
    Kind,
    KeyMethods,
    UseCase,
    ComparedWith,
    Tradeoffs,
    RealWorldFreq,
    CompetitiveFreq,
    Notes,
    Since,
}

impl Record for ContainerSummary {
    type Field = SummaryField;

    fn label(&self) -> &str {
        self.name
    }

    fn value(&self, field: SummaryField) -> Option<CellValue<'_>> {
        let text = match field {
            SummaryField::Name => self.name,
            SummaryField::Header => self.header,
            SummaryField::Kind => self.kind,
            SummaryField::KeyMethods => self.key_methods,
            SummaryField::UseCase => self.use_case,
            SummaryField::ComparedWith => self.compared_with,
            SummaryField::Tradeoffs => self.tradeoffs,
            SummaryField::RealWorldFreq => return Some(CellValue::Score(self.real_world_freq)),
            SummaryField::CompetitiveFreq => return Some(CellValue::Score(self.competitive_freq)),
            SummaryField::Notes => return self.notes.map(CellValue::Text),
            SummaryField::Since => self.since.label(),
        };
        Some(CellValue::Text(text))
    }
}

/// Schema of the other-containers sheet.
pub const SUMMARY_COLUMNS: &[Column<SummaryField>] = &[
    Column::required(SummaryField::Name, "Container"),
    Column::required(SummaryField::Header, "Header"),
    Column::required(SummaryField::Kind, "Category"),
    Column::required(SummaryField::KeyMethods, "Key Methods"),
    Column::required(SummaryField::UseCase, "Use Case"),
    Column::required(SummaryField::ComparedWith, "Compared To"),
    Column::required(SummaryField::Tradeoffs, "Trade-offs"),
    Column::required(SummaryField::RealWorldFreq, "Real-World Freq"),
    Column::required(SummaryField::CompetitiveFreq, "DSA/LeetCode Freq"),
    Column::optional(SummaryField::Notes, "Notes"),
    Column::required(SummaryField::Since, "Since"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_columns_lead_with_container() {
        assert_eq!(METHOD_COLUMNS[0].field, EntryField::Container);
        assert_eq!(METHOD_COLUMNS[1].field, EntryField::Name);
        assert_eq!(METHOD_COLUMNS.len(), ALGORITHM_COLUMNS.len() + 1);
    }

    #[test]
    fn test_standard_labels() {
        assert_eq!(Standard::Cpp98.to_string(), "C++98");
        assert_eq!(Standard::Cpp20.label(), "C++20");
        assert!(Standard::Cpp11 < Standard::Cpp17);
    }
}
