// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod accounting_api_datasource;
        mod http_utils;
        pub(crate) mod payroll_api_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod accounting_amount_model;
        pub(crate) mod accounting_operation_model;
        pub(crate) mod dashboard_models;
        pub(crate) mod iso_date_model;
        pub(crate) mod lenient_string_model;
        pub(crate) mod raw_operations_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod accounting_repository_impl;
        pub(crate) mod payroll_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account_category;
        pub(crate) mod accounting_operation;
        pub(crate) mod dashboard;
        pub(crate) mod employee_salary_record;
        pub(crate) mod payroll_period;
        pub(crate) mod payroll_report;
        pub(crate) mod raw_operations;
    }
    pub(crate) mod logic {
        pub(crate) mod account_classifier;
        pub(crate) mod employee_aggregator;
        mod french_collation;
        pub(crate) mod operation_normalizer;
        pub(crate) mod result_sorter;
    }
    pub(crate) mod repositories {
        pub(crate) mod accounting_repository;
        pub(crate) mod payroll_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod dashboard_usecase;
        pub(crate) mod payroll_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod salary_csv_writer;
    pub(crate) mod salary_table_printer;
    mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account_category::*;
        pub use crate::domain::entities::accounting_operation::*;
        pub use crate::domain::entities::dashboard::*;
        pub use crate::domain::entities::employee_salary_record::*;
        pub use crate::domain::entities::payroll_period::*;
        pub use crate::domain::entities::payroll_report::*;
        pub use crate::domain::entities::raw_operations::*;
    }

    pub mod repositories {
        pub use crate::domain::repositories::accounting_repository::*;
        pub use crate::domain::repositories::payroll_repository::*;
    }
}
