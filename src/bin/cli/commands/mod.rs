pub mod complete;
pub mod day;
pub mod glossary;
pub mod login;
pub mod logout;
pub mod plan;
pub mod reset;
pub mod settings;
pub mod study;
pub mod users;
pub mod whoami;
