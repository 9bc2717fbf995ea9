//! Core value types for OFD (GB/T 33190-2016) structured documents.

/// Space-delimited scalar array and its affine-matrix interpretation.
pub mod ofd;
