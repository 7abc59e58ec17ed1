use crate::anf::mobius;
use crate::{Anf, BooleanFunction};

impl From<&BooleanFunction> for Anf {
    fn from(f: &BooleanFunction) -> Self {
        f.clone().into()
    }
}

impl From<BooleanFunction> for Anf {
    fn from(f: BooleanFunction) -> Self {
        let mut coefficients = f.table;
        mobius(&mut coefficients);
        Anf::from_table(coefficients)
    }
}

impl From<&Anf> for BooleanFunction {
    fn from(anf: &Anf) -> Self {
        anf.clone().into()
    }
}

impl From<Anf> for BooleanFunction {
    fn from(anf: Anf) -> Self {
        let mut table = anf.coefficients;
        mobius(&mut table);
        BooleanFunction::from_table(table)
    }
}
