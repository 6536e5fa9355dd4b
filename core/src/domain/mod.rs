/// This module contains the domain logic for the application data transfer.
///
/// DTOs are used to transfer data between the application layers. As a best
/// practice, the domain layer should not depend on any other layer, so the DTOs
/// itself. This way, the domain layer can be reused in other crates without
/// any dependencies.
///
pub mod dtos;

/// This module contains the interfaces implemented by the outer layers.
///
/// The core never performs network I/O itself. Collaborators that do are
/// described here as traits and injected into the use cases.
///
pub mod entities;
