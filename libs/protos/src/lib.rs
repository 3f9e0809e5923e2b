// @generated
// Wires up buf-generated protobuf code.
// The prost files include!() their tonic counterparts.

pub mod scintirete {
    pub mod v1 {
        include!("generated/scintirete/v1/scintirete.v1.rs");
    }
}
