// API actions, grouped by the part of the REST API they address.

pub mod document;
