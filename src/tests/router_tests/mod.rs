mod complaints_tests;
mod dashboard_tests;
mod news_tests;
mod properties_tests;
mod reports_tests;
mod users_tests;
