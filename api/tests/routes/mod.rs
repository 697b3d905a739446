mod analytics_test;
mod auth_test;
mod catalog_test;
mod guards_test;
mod plans_test;
mod schedulings_test;
mod users_test;
