use bolero::check;
use mint_tables::{Context, Decimal, Fixed64x64};
use num_bigint::BigInt;

#[test]
fn fuzz_encoding_within_half_ulp() {
    check!()
        .with_type::<(i64, u8)>()
        .for_each(|&(coefficient, scale)| {
            let ctx = Context::default();
            let wide = Context::new(200).unwrap();
            let value = Decimal::new(BigInt::from(coefficient), -i64::from(scale % 40));

            let fixed = Fixed64x64::from_decimal(&value, ctx).unwrap();

            // |bits / 2^64 - value| <= 2^-65
            let half_ulp = wide
                .div(&Fixed64x64::from_bits(1).to_decimal(), &Decimal::from_integer(2))
                .unwrap();
            let error = wide.sub(&fixed.to_decimal(), &value).abs();
            assert!(error <= half_ulp, "{value} encoded as {fixed}");

            // Encoding is monotone: one unit up must overshoot or stay within half a unit.
            let next = Fixed64x64::from_bits(fixed.to_bits() + 1).to_decimal();
            assert!(wide.sub(&next, &value) >= half_ulp);
        });
}
