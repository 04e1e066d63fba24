mod dialect_tests;
mod incomplete_tests;
mod nesting_tests;
mod unclosed_tests;
mod unexpected_tests;
