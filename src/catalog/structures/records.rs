//! All-text record types of the data-structures catalog.
//!
//! Each type is declared with [`text_record!`], which emits the struct, its
//! field enum, the [`Record`] impl and a column schema in which every column
//! is required.

use crate::record::{CellValue, Column, Record};

macro_rules! text_record {
    (
        $(#[$meta:meta])*
        $name:ident, $field_enum:ident, $columns:ident, label = $label:ident {
            $( $field:ident => $variant:ident : $header:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            $(
                #[doc = $header]
                pub $field: &'static str,
            )+
        }

        #[doc = concat!("Columns of a [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $field_enum {
            $(
                #[doc = $header]
                $variant,
            )+
        }

        impl Record for $name {
            type Field = $field_enum;

            fn label(&self) -> &str {
                self.$label
            }

            fn value(&self, field: $field_enum) -> Option<CellValue<'_>> {
                let text = match field {
                    $( $field_enum::$variant => self.$field, )+
                };
                Some(CellValue::Text(text))
            }
        }

        #[doc = concat!("Schema of the [`", stringify!($name), "`] sheet.")]
        pub const $columns: &[Column<$field_enum>] = &[
            $( Column::required($field_enum::$variant, $header), )+
        ];
    };
}

text_record! {
    /// A data structure with per-operation complexities and guidance.
    DataStructure, StructureField, STRUCTURE_COLUMNS, label = name {
        category => Category: "Category",
        name => Name: "Name",
        concept => Concept: "Concept",
        java => Java: "Java",
        cpp => Cpp: "C++",
        python => Python: "Python",
        javascript => JavaScript: "JavaScript",
        access_by_index => AccessByIndex: "Access by index",
        access_front => AccessFront: "Access front",
        access_back => AccessBack: "Access back",
        insert_front => InsertFront: "Insert front",
        insert_middle => InsertMiddle: "Insert middle",
        insert_back => InsertBack: "Insert back",
        delete_front => DeleteFront: "Delete front",
        delete_middle => DeleteMiddle: "Delete middle",
        delete_back => DeleteBack: "Delete back",
        search_unsorted => SearchUnsorted: "Search unsorted",
        search_sorted => SearchSorted: "Search sorted",
        memory_locality => MemoryLocality: "Memory locality",
        memory_overhead => MemoryOverhead: "Memory overhead",
        ordered => Ordered: "Ordered",
        duplicates => Duplicates: "Duplicates",
        thread_safe => ThreadSafe: "Thread-safe",
        use_cases => UseCases: "Use cases",
        industries => Industries: "Industries",
        when_to_use => WhenToUse: "When to use",
        when_not_to_use => WhenNotToUse: "When NOT to use",
    }
}

text_record! {
    /// A core concept behind one or more structures.
    Concept, ConceptField, CONCEPT_COLUMNS, label = concept {
        concept => Concept: "Concept",
        explanation => Explanation: "Explanation",
        industries => Industries: "Industries",
        when_used => WhenUsed: "When used",
        when_not_used => WhenNotUsed: "When not used",
    }
}

text_record! {
    /// Meaning of one complexity column of the structures sheet.
    Operation, OperationField, OPERATION_COLUMNS, label = operation {
        operation => Operation: "Operation",
        meaning => Meaning: "Meaning",
        example => Example: "Example",
    }
}

text_record! {
    /// Notable collection libraries for one language.
    LibrarySet, LibraryField, LIBRARY_COLUMNS, label = language {
        language => Language: "Language",
        category => Category: "Category",
        libraries => Libraries: "Libraries",
    }
}

text_record! {
    /// One Big-O complexity class.
    ComplexityClass, ComplexityField, COMPLEXITY_COLUMNS, label = notation {
        notation => Notation: "Notation",
        name => Name: "Name",
        description => Description: "Description",
        examples => Examples: "Examples",
    }
}

text_record! {
    /// A practical scenario and the structure that fits it best.
    UseCaseScenario, UseCaseField, USE_CASE_COLUMNS, label = scenario {
        scenario => Scenario: "Scenario",
        requirements => Requirements: "Requirements",
        best_choice => BestChoice: "Best choice",
        why => Why: "Why",
        avoid => Avoid: "Avoid",
    }
}
