//! Runtime-typed entry points for the `smallint` wire type.

value_dispatch! {
    wire: "smallint",
    marshal: SmallIntMarshal::marshal_smallint,
    unmarshal: SmallIntUnmarshal::unmarshal_smallint,
}
