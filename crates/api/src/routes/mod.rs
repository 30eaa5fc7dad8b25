//! Route modules.
//!
//! Each module owns its handlers plus a `router()` constructor; the full
//! tree is assembled in [`crate::router::build_app_router`].
//!
//! ```text
//! /health          service health (ops only, not consumed by the front-end)
//!
//! /api/anime       anime collection (list all)
//! /api/comic       comic collection (list all)
//! /api/novel       novel collection (list all)
//! /{id}            anime detail by id
//!
//! /api/update0     download updates feed
//! /api/update1     anime updates feed
//! /api/update2     comic updates feed
//! /api/update3     novel updates feed
//! ```

pub mod catalog;
pub mod feed;
pub mod health;
