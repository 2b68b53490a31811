//! Data-structures catalog: structures across Java, C++, Python and
//! JavaScript with complexities, concepts and use-case guidance.

mod complexity;
mod concepts;
mod entries;
mod libraries;
mod operations;
pub mod records;
mod use_cases;

use crate::record::{SheetSource, Table};
use records::{
    COMPLEXITY_COLUMNS, CONCEPT_COLUMNS, ComplexityClass, Concept, DataStructure, LIBRARY_COLUMNS,
    LibrarySet, OPERATION_COLUMNS, Operation, STRUCTURE_COLUMNS, USE_CASE_COLUMNS,
    UseCaseScenario,
};

/// Main structures catalog.
pub static STRUCTURES: Table<'static, DataStructure> = Table::new(
    "structures",
    "Data Structures",
    0x0044_72C4,
    STRUCTURE_COLUMNS,
    entries::STRUCTURE_RECORDS,
);

/// Core concepts.
pub static CONCEPTS: Table<'static, Concept> = Table::new(
    "concepts",
    "Concepts",
    0x0070_AD47,
    CONCEPT_COLUMNS,
    concepts::CONCEPT_RECORDS,
);

/// Legend for the complexity columns.
pub static OPERATIONS: Table<'static, Operation> = Table::new(
    "operations",
    "Operations Legend",
    0x00FF_C000,
    OPERATION_COLUMNS,
    operations::OPERATION_RECORDS,
);

/// Libraries per language.
pub static LIBRARIES: Table<'static, LibrarySet> = Table::new(
    "libraries",
    "Libraries",
    0x005B_9BD5,
    LIBRARY_COLUMNS,
    libraries::LIBRARY_RECORDS,
);

/// Big-O reference.
pub static COMPLEXITY: Table<'static, ComplexityClass> = Table::new(
    "complexity",
    "Complexity Guide",
    0x00A5_A5A5,
    COMPLEXITY_COLUMNS,
    complexity::COMPLEXITY_RECORDS,
);

/// Scenario-driven recommendations.
pub static USE_CASES: Table<'static, UseCaseScenario> = Table::new(
    "use-cases",
    "Use Case Scenarios",
    0x00ED_7D31,
    USE_CASE_COLUMNS,
    use_cases::USE_CASE_RECORDS,
);

/// All tables in display order.
pub static TABLES: [&'static dyn SheetSource; 6] = [
    &STRUCTURES,
    &CONCEPTS,
    &OPERATIONS,
    &LIBRARIES,
    &COMPLEXITY,
    &USE_CASES,
];
