//! `tt-grid`: who stands where, and who is about to.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`occupancy`] | `OccupancyGrid`: occupancy map, reservation map, unit registry |
//! | [`shape`]     | `Shape`: facing-aware relative triangle tables              |
//!
//! # Two maps
//!
//! *Occupancy* is the permanent claim of a resting unit's footprint (or of a
//! static obstacle).  *Reservation* is the transient claim a unit holds on
//! its destination while a move step is in flight.  Both answer the same
//! blocking query, and a unit is never blocked by its own claims.
//!
//! # Single writer
//!
//! The grid is mutated only from tick processing and from scheduling or
//! cancellation calls made on the same logical thread.  It holds no locks;
//! wrap the whole grid in a `Mutex` if it must be shared across threads.

pub mod occupancy;
pub mod shape;


pub use occupancy::OccupancyGrid;
pub use shape::Shape;
