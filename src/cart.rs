/// Cart data structures and the find-or-append merge rule
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One product line in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: u32,
}

/// Product fields needed to put something in the cart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartProduct {
    pub product_id: String,
    pub name: String,
    pub price: i64,
    pub image: String,
}

/// Ordered list of line items; insertion order is display order.
///
/// At most one line item exists per `product_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Build a cart from stored records, folding duplicate product ids into
    /// the first occurrence.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            match cart.find_mut(&item.product_id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.product_id == product_id)
    }

    /// Add `quantity` units of a product. An existing line for the same
    /// product id has its quantity incremented; otherwise a new line with a
    /// fresh local id is appended.
    pub fn add(&mut self, product: CartProduct, quantity: u32) -> &LineItem {
        let index = match self.items.iter().position(|item| item.product_id == product.product_id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(quantity);
                index
            }
            None => {
                self.items.push(LineItem {
                    id: Uuid::new_v4().to_string(),
                    product_id: product.product_id,
                    name: product.name,
                    price: product.price,
                    image: product.image,
                    quantity,
                });
                self.items.len() - 1
            }
        };

        &self.items[index]
    }

    /// Sum of quantities across all lines
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<LineItem>::deserialize(deserializer).map(Cart::from_items)
    }
}

// Stored carts come from older script versions too: ids were timestamps and
// NaN prices were serialized as null.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => crate::money::parse_price(&s),
        _ => None,
    };

    Ok(value.and_then(|v| T::try_from(v).ok()).unwrap_or_default())
}
