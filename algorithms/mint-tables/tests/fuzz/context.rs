use bolero::check;
use mint_tables::{Context, Decimal};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Pow, Signed};

fn to_ratio(value: &Decimal) -> BigRational {
    let ten = BigInt::from(10u8);
    let scale: BigInt = Pow::pow(ten, value.exponent().unsigned_abs());
    if value.exponent() >= 0 {
        BigRational::from_integer(value.coefficient() * scale)
    } else {
        BigRational::new(value.coefficient().clone(), scale)
    }
}

/// `result` carries at most `precision` digits and lies within half a unit
/// of its last digit from `exact`.
fn assert_correctly_rounded(result: &Decimal, exact: &BigRational, precision: u32) {
    let digits = result.coefficient().magnitude().to_str_radix(10).len();
    assert!(digits <= precision as usize, "{result} has {digits} digits");

    let unit = to_ratio(&Decimal::new(BigInt::from(1), result.exponent()));
    let error = (to_ratio(result) - exact).abs();
    assert!(
        error * BigInt::from(2) <= unit,
        "{result} is not within half a unit of the exact value"
    );
}

#[test]
fn fuzz_division_is_correctly_rounded() {
    check!()
        .with_type::<(i64, i64, u8)>()
        .for_each(|&(numerator, denominator, precision)| {
            if denominator == 0 {
                return;
            }
            let precision = u32::from(precision % 40) + 1;
            let ctx = Context::new(precision).unwrap();
            let a = Decimal::from_integer(numerator);
            let b = Decimal::from_integer(denominator);

            let quotient = ctx.div(&a, &b).unwrap();
            let exact = BigRational::new(BigInt::from(numerator), BigInt::from(denominator));
            assert_correctly_rounded(&quotient, &exact, precision);
        });
}

#[test]
fn fuzz_arithmetic_is_correctly_rounded() {
    check!()
        .with_type::<(i64, u8, i64, u8, u8)>()
        .for_each(|&(x, x_scale, y, y_scale, precision)| {
            let precision = u32::from(precision % 40) + 1;
            let ctx = Context::new(precision).unwrap();
            let a = Decimal::new(BigInt::from(x), -i64::from(x_scale % 30));
            let b = Decimal::new(BigInt::from(y), -i64::from(y_scale % 30));
            let (ra, rb) = (to_ratio(&a), to_ratio(&b));

            assert_correctly_rounded(&ctx.add(&a, &b), &(&ra + &rb), precision);
            assert_correctly_rounded(&ctx.sub(&a, &b), &(&ra - &rb), precision);
            assert_correctly_rounded(&ctx.mul(&a, &b), &(&ra * &rb), precision);
            assert_eq!(a.cmp(&b), ra.cmp(&rb), "ordering disagrees for {a} and {b}");
        });
}
