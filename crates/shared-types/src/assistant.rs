//! Canned replies for the floating help assistant.

pub const GREETING: &str =
    "Hi! I'm the GroupDeliver assistant. Ask me about orders, savings, becoming a supplier or your account.";

const ORDERS: &str = "You can place and track orders from the vendor dashboard. \
Open \"Place Order\" to add one, then follow it under \"My Orders\".";
const SAVINGS: &str = "Orders headed the same way share one trip, so the delivery \
cost is split across the group. Vendors typically save 30-50%.";
const SUPPLIER: &str = "To deliver with us, sign up as a supplier with your vehicle \
type and driving license number. Your routes appear on the supplier dashboard.";
const ACCOUNT: &str = "Use the login page and pick your role tab: vendor, supplier \
or admin. New here? Create an account from the signup page.";
const SUPPORT: &str = "You can reach support at support@groupdeliver.com or \
+91 98765 43210, or send a message from the contact page.";
const HELLO: &str = "Hello! How can I help with your deliveries today?";
const FALLBACK: &str = "I'm not sure about that one. Try asking about orders, \
savings, suppliers or your account, or visit the contact page.";

/// Keyword table checked in order; the first topic with a match wins.
const TOPICS: &[(&[&str], &str)] = &[
    (&["order", "track", "deliver", "status"], ORDERS),
    (&["save", "saving", "cost", "price", "cheap"], SAVINGS),
    (&["supplier", "driver", "vehicle", "route"], SUPPLIER),
    (&["login", "log in", "sign", "account", "password"], ACCOUNT),
    (&["contact", "support", "help", "phone", "email"], SUPPORT),
    (&["hello", "hi", "hey", "namaste"], HELLO),
];

/// Keywords shorter than this must match a whole word.
const MIN_PREFIX_LEN: usize = 4;

fn word_matches(word: &str, keyword: &str) -> bool {
    if keyword.len() < MIN_PREFIX_LEN {
        word == keyword
    } else {
        word.starts_with(keyword)
    }
}

/// Pick a reply for a user message.
pub fn reply_to(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    TOPICS
        .iter()
        .find(|(keywords, _)| {
            keywords.iter().any(|k| {
                if k.contains(' ') {
                    lowered.contains(k)
                } else {
                    words.iter().any(|w| word_matches(w, k))
                }
            })
        })
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK)
}
