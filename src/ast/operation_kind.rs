/// The kind of a GraphQL
/// [operation](https://spec.graphql.org/October2021/#sec-Language.Operations).
///
/// Shorthand documents (`{ ... }`) default to [`OperationKind::Query`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The keyword spelling used in document source text.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}
