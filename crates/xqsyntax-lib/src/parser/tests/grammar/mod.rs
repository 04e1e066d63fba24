mod constructors_tests;
mod expressions_tests;
mod flwor_tests;
mod module_tests;
mod paths_tests;
mod primary_tests;
mod trivia_tests;
mod types_tests;
