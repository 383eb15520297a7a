pub mod listing_tests;
pub mod path_info_tests;
