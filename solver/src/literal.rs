//! A literal is a non-zero signed integer whose absolute value names a
//! variable; the sign encodes polarity. Variables are `1..=num_vars`.

pub type VarId = usize;
pub type Literal = i64;

#[inline]
pub fn pos(var: VarId) -> Literal {
    var as Literal
}

#[inline]
pub fn neg(var: VarId) -> Literal {
    -(var as Literal)
}

#[inline]
pub fn of(var: VarId, sign: bool) -> Literal {
    if sign {
        pos(var)
    } else {
        neg(var)
    }
}

#[inline]
pub fn var_of(lit: Literal) -> VarId {
    lit.unsigned_abs() as VarId
}

#[inline]
pub fn is_positive(lit: Literal) -> bool {
    lit > 0
}
