pub mod code_kind;
pub mod punch_record;
