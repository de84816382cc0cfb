//! Translation between the presentation, domain and data boundaries.
//!
//! Both mappers are plain values: build them once at composition time and hand
//! them to the layer that needs them.

pub mod domain_data;
pub mod presentation_domain;

pub use domain_data::DomainDataMapper;
pub use presentation_domain::PresentationDomainMapper;
