//! Search of the base-interface closure for an equivalent member.

use crate::symbols::{MemberSymbol, SymbolResolver, TypeSymbol, members_equivalent, types_equivalent};

/// Is `member` already declared by one of `bases` or anything they inherit?
///
/// Each interface is visited once, so inheritance cycles terminate. Bases
/// the resolver does not know contribute nothing.
pub fn provided_by_bases(
    member: &MemberSymbol,
    bases: &[TypeSymbol],
    resolver: &dyn SymbolResolver,
) -> bool {
    let mut pending: Vec<TypeSymbol> = bases.to_vec();
    let mut visited: Vec<TypeSymbol> = Vec::new();

    while let Some(base) = pending.pop() {
        if visited.iter().any(|seen| types_equivalent(seen, &base)) {
            continue;
        }
        if let Some(interface) = resolver.interface(&base) {
            if interface
                .members
                .iter()
                .any(|candidate| members_equivalent(candidate, member))
            {
                trace!(member = %member.name, base = %base, "member provided by base interface");
                return true;
            }
            pending.extend(interface.bases);
        }
        visited.push(base);
    }
    false
}
