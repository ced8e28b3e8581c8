mod detail_tests;
mod export_tests;
mod home_tests;
mod refresh_tests;
