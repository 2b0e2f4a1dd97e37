pub mod response_body;
