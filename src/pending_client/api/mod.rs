mod responses;

pub use responses::PendingResponse;
