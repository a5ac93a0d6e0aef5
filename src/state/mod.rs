//! Pure theme domain: preference values and transition steps.
//!
//! DESIGN
//! ======
//! Everything here is side-effect free so controller behavior can be
//! exercised without a live document. Browser concerns stay in `util`.

pub mod preference;
pub mod transition;
