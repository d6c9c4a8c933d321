use zkaccel_backend::{
    api::NttButterfly,
    layouts::{Backend, FieldLimbs, Module},
};

use crate::{
    error::Result,
    field::{Field, FieldParams},
};

impl<B: Backend, const L: usize> Field<'_, B, L>
where
    [u64; L]: FieldLimbs,
    Module<B>: NttButterfly,
{
    /// One radix-2 stage over `in_even.len()` pairs:
    /// `out_even[i] = in_even[i] + twiddle[i] * in_odd[i]` and
    /// `out_odd[i] = in_even[i] - twiddle[i] * in_odd[i]`.
    ///
    /// All slices must have the same length. Elements are in Montgomery form.
    pub fn ntt_butterfly(
        &self,
        out_even: &mut [[u64; L]],
        out_odd: &mut [[u64; L]],
        in_even: &[[u64; L]],
        in_odd: &[[u64; L]],
        twiddle: &[[u64; L]],
    ) -> Result<()> {
        let params: &FieldParams<L> = self.params();
        self.module().ntt_butterfly(
            out_even.as_flattened_mut(),
            out_odd.as_flattened_mut(),
            in_even.as_flattened(),
            in_odd.as_flattened(),
            twiddle.as_flattened(),
            &params.modulus,
            params.mu,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use zkaccel_backend::{api::ModuleNew, implementation::cpu_ref::CpuRef, layouts::Module};

    use crate::field::{BN254_FR, Field};

    #[test]
    fn unit_twiddle_is_add_sub() {
        let module: Module<CpuRef> = Module::<CpuRef>::new();
        let field: Field<'_, CpuRef, 4> = Field::new(&module, BN254_FR);

        let a: [[u64; 4]; 2] = [field.from_u64(10), field.from_u64(3)];
        let b: [[u64; 4]; 2] = [field.from_u64(4), field.from_u64(5)];
        let w: [[u64; 4]; 2] = [field.one(); 2];
        let mut even: [[u64; 4]; 2] = [[0u64; 4]; 2];
        let mut odd: [[u64; 4]; 2] = [[0u64; 4]; 2];
        field.ntt_butterfly(&mut even, &mut odd, &a, &b, &w).unwrap();

        assert_eq!(even, [field.from_u64(14), field.from_u64(8)]);
        assert_eq!(odd[0], field.from_u64(6));
        assert_eq!(odd[1], field.neg(&field.from_u64(2)));
    }

    #[test]
    fn mismatched_lengths() {
        let module: Module<CpuRef> = Module::<CpuRef>::new();
        let field: Field<'_, CpuRef, 4> = Field::new(&module, BN254_FR);
        let a: [[u64; 4]; 2] = [field.one(); 2];
        let mut even: [[u64; 4]; 1] = [[0u64; 4]; 1];
        let mut odd: [[u64; 4]; 2] = [[0u64; 4]; 2];
        assert!(field.ntt_butterfly(&mut even, &mut odd, &a, &a, &a).is_err());
    }
}
