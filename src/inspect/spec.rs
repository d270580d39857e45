//! Expectations describing a constructor or method that must be declared.
//!
//! A spec is pure data and never modified by the inspectors. Visibility may be
//! [`Visibility::Any`] to skip the visibility check, and an absent exception list means
//! the `throws` clause is not checked at all (as opposed to an empty list, which
//! requires a member that declares no exceptions).
//!
//! Test harnesses usually describe expectations as parallel columns, one entry per
//! expected member; [`ConstructorSpec::from_columns`] and [`MethodSpec::from_columns`]
//! turn those into spec lists.

use crate::{
    metadata::{members::Visibility, typesystem::TypeName},
    Result,
};

/// Expected shape of a constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorSpec {
    /// Required visibility, `Any` to skip the check
    pub visibility: Visibility,
    /// Required parameter types, in any order
    pub params: Vec<TypeName>,
    /// Required `throws` clause in any order, `None` to skip the check
    pub exceptions: Option<Vec<TypeName>>,
}

impl ConstructorSpec {
    /// A constructor of any visibility taking `params`
    #[must_use]
    pub fn new(params: &[&str]) -> Self {
        ConstructorSpec {
            visibility: Visibility::Any,
            params: TypeName::list(params),
            exceptions: None,
        }
    }

    /// Require the given visibility
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Require exactly these declared exceptions
    #[must_use]
    pub fn with_exceptions(mut self, exceptions: &[&str]) -> Self {
        self.exceptions = Some(TypeName::list(exceptions));
        self
    }

    /// Build one spec per row of parallel columns.
    ///
    /// `params` defines the number of rows. A missing visibility column requires nothing,
    /// a missing exception column skips the `throws` check for every row.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a column length differs from `params`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use memberscope::{inspect::ConstructorSpec, metadata::{members::Visibility, typesystem::TypeName}};
    ///
    /// let specs = ConstructorSpec::from_columns(
    ///     Some(&[Visibility::Public, Visibility::Private]),
    ///     &[vec![], TypeName::list(&["int"])],
    ///     None,
    /// )?;
    /// assert_eq!(specs[1].visibility, Visibility::Private);
    /// assert!(specs[1].exceptions.is_none());
    /// # Ok::<(), memberscope::Error>(())
    /// ```
    pub fn from_columns(
        visibilities: Option<&[Visibility]>,
        params: &[Vec<TypeName>],
        exceptions: Option<&[Vec<TypeName>]>,
    ) -> Result<Vec<ConstructorSpec>> {
        let rows = params.len();
        check_column("visibility", visibilities.map(<[_]>::len), rows)?;
        check_column("exception", exceptions.map(<[_]>::len), rows)?;

        Ok((0..rows)
            .map(|row| ConstructorSpec {
                visibility: visibilities.map_or(Visibility::Any, |column| column[row]),
                params: params[row].clone(),
                exceptions: exceptions.map(|column| column[row].clone()),
            })
            .collect())
    }
}

/// Expected shape of a method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Required visibility, `Any` to skip the check
    pub visibility: Visibility,
    /// Required return type, `void` for none
    pub return_type: TypeName,
    /// Required name, compared case-sensitively
    pub name: String,
    /// Required parameter types, in any order
    pub params: Vec<TypeName>,
    /// Required `throws` clause in any order, `None` to skip the check
    pub exceptions: Option<Vec<TypeName>>,
}

impl MethodSpec {
    /// A method of any visibility named `name`, returning `return_type` and taking `params`
    #[must_use]
    pub fn new(return_type: &str, name: &str, params: &[&str]) -> Self {
        MethodSpec {
            visibility: Visibility::Any,
            return_type: TypeName::new(return_type),
            name: name.to_string(),
            params: TypeName::list(params),
            exceptions: None,
        }
    }

    /// Require the given visibility
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Require exactly these declared exceptions
    #[must_use]
    pub fn with_exceptions(mut self, exceptions: &[&str]) -> Self {
        self.exceptions = Some(TypeName::list(exceptions));
        self
    }

    /// Build one spec per row of parallel columns.
    ///
    /// `params` defines the number of rows; see [`ConstructorSpec::from_columns`] for the
    /// optional columns.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a column length differs from `params`.
    pub fn from_columns(
        visibilities: Option<&[Visibility]>,
        return_types: &[TypeName],
        names: &[&str],
        params: &[Vec<TypeName>],
        exceptions: Option<&[Vec<TypeName>]>,
    ) -> Result<Vec<MethodSpec>> {
        let rows = params.len();
        check_column("visibility", visibilities.map(<[_]>::len), rows)?;
        check_column("return type", Some(return_types.len()), rows)?;
        check_column("name", Some(names.len()), rows)?;
        check_column("exception", exceptions.map(<[_]>::len), rows)?;

        Ok((0..rows)
            .map(|row| MethodSpec {
                visibility: visibilities.map_or(Visibility::Any, |column| column[row]),
                return_type: return_types[row].clone(),
                name: names[row].to_string(),
                params: params[row].clone(),
                exceptions: exceptions.map(|column| column[row].clone()),
            })
            .collect())
    }
}

fn check_column(column: &str, len: Option<usize>, rows: usize) -> Result<()> {
    match len {
        Some(len) if len != rows => Err(malformed_error!(
            "{} column has {} entries, expected {}",
            column,
            len,
            rows
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_builders() {
        let spec = ConstructorSpec::new(&["int"]).with_visibility(Visibility::Public);
        assert_eq!(spec.params, TypeName::list(&["int"]));
        assert!(spec.exceptions.is_none());

        let spec = MethodSpec::new("void", "close", &[]).with_exceptions(&[]);
        assert_eq!(spec.visibility, Visibility::Any);
        assert_eq!(spec.exceptions, Some(vec![]));
    }

    #[test]
    fn test_constructor_columns() {
        let specs = ConstructorSpec::from_columns(
            None,
            &[TypeName::list(&["int"]), vec![]],
            Some(&[vec![], TypeName::list(&["java.io.IOException"])]),
        )
        .unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].visibility, Visibility::Any);
        assert_eq!(specs[0].exceptions, Some(vec![]));
        assert_eq!(
            specs[1].exceptions,
            Some(TypeName::list(&["java.io.IOException"]))
        );
    }

    #[test]
    fn test_method_columns() {
        let specs = MethodSpec::from_columns(
            Some(&[Visibility::Private]),
            &[TypeName::new("java.lang.String")],
            &["getName"],
            &[vec![]],
            None,
        )
        .unwrap();

        assert_eq!(
            specs,
            vec![MethodSpec::new("java.lang.String", "getName", &[])
                .with_visibility(Visibility::Private)]
        );
    }

    #[test]
    fn test_column_mismatch() {
        let result = ConstructorSpec::from_columns(
            Some(&[Visibility::Public]),
            &[vec![], vec![]],
            None,
        );
        assert!(matches!(result, Err(Error::Malformed { .. })));

        let result = MethodSpec::from_columns(
            None,
            &[TypeName::new("int")],
            &["size", "length"],
            &[vec![]],
            None,
        );
        assert!(matches!(result, Err(Error::Malformed { .. })));

        let result = MethodSpec::from_columns(
            None,
            &[TypeName::new("int")],
            &["size"],
            &[vec![]],
            Some(&[]),
        );
        assert!(matches!(result, Err(Error::Malformed { .. })));
    }
}
