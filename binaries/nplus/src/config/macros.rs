/// Declares a config struct and generates a `write_docs` function for it,
/// which turns the doc comments on its fields into TOML comments.
///
/// # Attributes
/// - `#[child = true]`: the field is itself a config struct, its fields are documented too.
/// - `##[...]`: any other attribute to put on the field, e.g. `##[serde(...)]`.
///
/// # Invariants
/// Required for this macro to work:
///
/// - struct must implement [`Default`] and `serde`
/// - None of the fields can be [`Option`]
///
/// # Documentation
/// Consider using the following style when adding documentation:
///
/// ```rust
/// struct Config {
///     /// BRIEF DESCRIPTION.
///     ///
///     /// (optional) LONGER DESCRIPTION.
///     ///
///     /// Type         | (optional) FIELD TYPE
///     /// Valid values | EXPRESSION REPRESENTING VALID VALUES
///     /// Examples     | (optional) A FEW EXAMPLE VALUES
///     field: (),
/// }
/// ```
///
/// Keep documentation lines under ~70 characters,
/// the generated file is meant to be read in a terminal.
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[child = $child:literal])?
                $(#[doc = $doc:expr])*
                $(##[$field_meta:meta])*
                $field_vis:vis $field:ident: $field_ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $name {
            /// Write the doc comments of every field into `doc` as TOML comments.
            pub(crate) fn write_docs(doc: &mut dyn ::toml_edit::TableLike) {
                $(
                    {
                        let key = stringify!($field);
                        let prefix = [ $( format!("##{}\n", $doc), )* ].concat();

                        $(
                            if $child {
                                if let Some(child) = doc.get_mut(key).and_then(::toml_edit::Item::as_table_like_mut) {
                                    <$field_ty>::write_docs(child);
                                }
                            }
                        )?

                        if let Some(table) = doc.get_mut(key).and_then(::toml_edit::Item::as_table_mut) {
                            table.decor_mut().set_prefix(format!("\n{prefix}"));
                        } else if let Some(mut key) = doc.key_mut(key) {
                            key.leaf_decor_mut().set_prefix(prefix);
                        }
                    }
                )*
            }
        }
    };
}

pub(crate) use config_struct;
