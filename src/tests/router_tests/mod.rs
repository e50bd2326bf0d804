mod api_tests;
mod home_tests;
mod results_tests;
