//! Runtime-typed entry points for the `int` wire type.

value_dispatch! {
    wire: "int",
    marshal: IntMarshal::marshal_int,
    unmarshal: IntUnmarshal::unmarshal_int,
}
