pub mod category_service;
pub mod recurring_service;
pub mod summary_service;
pub mod time_series_service;
pub mod transaction_service;
pub mod validation;

pub use category_service::{CategoryService, CategoryTotal};
pub use recurring_service::{ActiveFilter, RecurringService, RecurringSort, RecurringSortField};
pub use summary_service::{Summary, SummaryService};
pub use time_series_service::{MonthlyBucket, TimeSeriesService};
pub use transaction_service::{
    SortDirection, TransactionFilter, TransactionService, TransactionSort, TransactionSortField,
};
pub use validation::ValidationService;
