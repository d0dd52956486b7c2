#[path = "pipeline/end_to_end.rs"]
mod end_to_end;
#[path = "pipeline/loose_input.rs"]
mod loose_input;
