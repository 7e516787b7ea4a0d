#[path = "property/sequence_props.rs"]
mod sequence_props;

#[path = "property/text_props.rs"]
mod text_props;

#[path = "property/record_props.rs"]
mod record_props;

#[path = "property/shape_props.rs"]
mod shape_props;
