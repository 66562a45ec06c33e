use rand::Rng;
use rust_decimal::Decimal;

pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let digit = rng.gen_range(0..10);
        out.push(char::from(b'0' + digit as u8));
    }
    out
}

pub fn random_alphanum_upper<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0..CHARSET.len());
        out.push(char::from(CHARSET[idx]));
    }
    out
}

/// Amount with two decimal places in `[min_cents, max_cents]`.
pub fn random_amount<R: Rng + ?Sized>(rng: &mut R, min_cents: i64, max_cents: i64) -> Decimal {
    Decimal::new(rng.gen_range(min_cents..=max_cents), 2)
}

pub fn record_id<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    format!("{}-{}", prefix, random_alphanum_upper(rng, 10).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn amounts_have_cent_precision() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let amount = random_amount(&mut rng, 100, 5_000);
            assert_eq!(amount.scale(), 2);
            assert!(amount >= Decimal::new(100, 2) && amount <= Decimal::new(5_000, 2));
        }
    }

    #[test]
    fn ids_are_prefixed_and_sized() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = record_id(&mut rng, "pay");
        assert!(id.starts_with("pay-"));
        assert_eq!(id.len(), 14);
        assert_eq!(random_digits(&mut rng, 6).len(), 6);
    }
}
