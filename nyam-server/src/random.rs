//! Random demo-data generators
//!
//! Pure helpers that produce plausible fake values for pre-filling the
//! insert forms. They are exposed through `GET /api/random/{entity}` and
//! are never called by the insert endpoints themselves.
//!
//! Every generator takes the RNG as a parameter so tests can run them
//! against a seeded source.

use chrono::{Duration, Local, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

use shared::models::{
    CategoryCreate, ClientCreate, OrderCreate, OrderLineInput, OrderStatus, PaymentMethod,
    ProductCreate, ProductSummary, ReservationCreate, ReservationStatus,
};

// ── Primitive generators ────────────────────────────────────────────

/// Pick a random element of a non-empty slice.
pub fn choice<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    items.choose(rng).expect("choice requires a non-empty slice")
}

/// Random integer in `min..=max`.
pub fn int_in(rng: &mut impl Rng, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Random float in `min..max`, rounded to 2 decimals.
pub fn float_in(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    let value: f64 = rng.gen_range(min..max);
    (value * 100.0).round() / 100.0
}

pub fn boolean(rng: &mut impl Rng) -> bool {
    rng.gen_bool(0.5)
}

/// A plausible near-future booking time: up to `max_days_ahead` days
/// from now, between 12:00 and 22:00, minutes on the quarter hour.
/// Formatted like an HTML `datetime-local` value (`YYYY-MM-DDTHH:MM`).
pub fn future_datetime(rng: &mut impl Rng, min_days_ahead: i64, max_days_ahead: i64) -> String {
    let days = int_in(rng, min_days_ahead, max_days_ahead);
    let hour = int_in(rng, 12, 22) as u32;
    let minute = *choice(rng, &[0u32, 15, 30, 45]);

    let target = Local::now().date_naive() + Duration::days(days);
    let target: NaiveDateTime = target
        .and_hms_opt(hour, minute, 0)
        .expect("hour and minute are in range");
    target.format("%Y-%m-%dT%H:%M").to_string()
}

/// A synthetic 9-digit mobile-style phone number (prefix 6 or 7).
pub fn phone_number(rng: &mut impl Rng) -> String {
    let mut number = choice(rng, &['6', '7']).to_string();
    for _ in 0..8 {
        number.push(char::from(b'0' + int_in(rng, 0, 9) as u8));
    }
    number
}

/// Password alphabet without the easily-confused characters (I, l, 0, O, 1).
const PASSWORD_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789@#$&";

/// A synthetic password of `length` characters.
pub fn password(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| char::from(*choice(rng, PASSWORD_ALPHABET)))
        .collect()
}

/// Lower-case a name into an email-safe slug: diacritics folded,
/// non-alphanumeric runs collapsed to a single dash, edges trimmed.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for c in value.chars().flat_map(fold_diacritic) {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Fold the accented characters that appear in the demo name pools.
fn fold_diacritic(c: char) -> std::iter::Once<char> {
    let folded = match c {
        'à' | 'á' | 'À' | 'Á' => 'a',
        'è' | 'é' | 'È' | 'É' => 'e',
        'í' | 'ï' | 'Í' | 'Ï' => 'i',
        'ò' | 'ó' | 'Ò' | 'Ó' => 'o',
        'ú' | 'ü' | 'Ú' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        other => other,
    };
    std::iter::once(folded)
}

// ── Per-entity payload builders ─────────────────────────────────────

const CATEGORY_DESCRIPTORS: [&str; 6] = [
    "Especialitat",
    "Selecció",
    "Clàssics",
    "Delícies",
    "Sabors",
    "Cuina",
];

const CATEGORY_GROUPS: [&str; 6] = [
    "de la casa",
    "vegetarianes",
    "de temporada",
    "del xef",
    "exprés",
    "premium",
];

const PRODUCT_DESCRIPTORS: [&str; 6] = [
    "Cremosa",
    "Cruixent",
    "Mediterrània",
    "Fusió",
    "Trufada",
    "Espèciada",
];

const PRODUCT_BASES: [&str; 8] = [
    "Pizza",
    "Hamburguesa",
    "Amanida",
    "Taco",
    "Pasta",
    "Sopa",
    "Torrada",
    "Entrepà",
];

const FIRST_NAMES: [&str; 8] = [
    "Laia", "Marc", "Sofia", "Hug", "Clara", "Pau", "Aina", "Jordi",
];

const LAST_NAMES: [&str; 8] = [
    "Martí", "Llopis", "Garcia", "Soriano", "Navarro", "Costa", "Ribas", "Segarra",
];

pub fn random_category(rng: &mut impl Rng) -> CategoryCreate {
    CategoryCreate {
        name: format!(
            "{} {}",
            choice(rng, &CATEGORY_DESCRIPTORS),
            choice(rng, &CATEGORY_GROUPS)
        ),
    }
}

pub fn random_client(rng: &mut impl Rng) -> ClientCreate {
    let first = choice(rng, &FIRST_NAMES);
    let last = format!("{} {}", choice(rng, &LAST_NAMES), choice(rng, &LAST_NAMES));
    let name = format!("{first} {last}");
    let email = format!(
        "{}{}@example.com",
        slugify(&format!("{first}.{last}")),
        int_in(rng, 1, 99)
    );
    ClientCreate {
        name,
        email,
        phone: phone_number(rng),
        password: password(rng, 10),
    }
}

pub fn random_product(rng: &mut impl Rng) -> ProductCreate {
    ProductCreate {
        name: format!(
            "{} {}",
            choice(rng, &PRODUCT_BASES),
            choice(rng, &PRODUCT_DESCRIPTORS)
        ),
        price: float_in(rng, 4.0, 28.0),
        category_id: int_in(rng, 1, 6),
        available: boolean(rng),
    }
}

pub fn random_reservation(rng: &mut impl Rng) -> ReservationCreate {
    ReservationCreate {
        client_id: int_in(rng, 1, 25),
        date: future_datetime(rng, 0, 21),
        party_size: int_in(rng, 1, 8),
        status: choice(rng, &ReservationStatus::ALL).as_str().to_string(),
    }
}

/// Build a random order against the current product list: up to three
/// distinct products, small quantities. With no products yet, one line
/// with a guessed id — the pre-fill is a convenience, the insert still
/// validates.
pub fn random_order(rng: &mut impl Rng, products: &[ProductSummary]) -> OrderCreate {
    let lines = if products.is_empty() {
        vec![OrderLineInput {
            product_id: int_in(rng, 1, 10),
            quantity: int_in(rng, 1, 4),
        }]
    } else {
        let line_count = int_in(rng, 1, products.len().min(3) as i64) as usize;
        let mut pool: Vec<&ProductSummary> = products.iter().collect();
        pool.shuffle(rng);
        pool.truncate(line_count);
        pool.into_iter()
            .map(|product| OrderLineInput {
                product_id: product.id,
                quantity: int_in(rng, 1, 4),
            })
            .collect()
    };

    OrderCreate {
        client_id: int_in(rng, 1, 50),
        // date-only, like the order form's date field
        date: future_datetime(rng, 0, 14)[..10].to_string(),
        status: choice(rng, &OrderStatus::ALL).as_str().to_string(),
        payment_method: choice(rng, &PaymentMethod::ALL).as_str().to_string(),
        lines,
    }
}
