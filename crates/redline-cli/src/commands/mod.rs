pub mod apply;
pub mod dispatch;
pub mod generate;
pub mod lint;
pub mod locate;
pub mod parse;
pub mod schema;
pub mod sections;
pub mod shared;
