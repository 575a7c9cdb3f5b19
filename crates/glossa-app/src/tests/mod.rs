mod channel_tests;
mod support;
