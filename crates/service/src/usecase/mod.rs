pub mod api_record;

pub use api_record::ApiRecordUseCase;
