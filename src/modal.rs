/// Product modal state: open/closed, the product it was opened for and the
/// quantity stepper

use crate::cart::CartProduct;
use crate::money::parse_price;

/// Product fields a trigger element carries into the modal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDescriptor {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
}

/// The product the modal currently acts on. Overwritten on every open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkingSet {
    pub product_id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl WorkingSet {
    fn from_descriptor(product: &ProductDescriptor) -> Self {
        WorkingSet {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.clone(),
            image: product.image.clone(),
        }
    }

    /// Cart-ready product. An unparseable price becomes 0.
    pub fn to_cart_product(&self) -> CartProduct {
        let price = parse_price(&self.price).unwrap_or_else(|| {
            log::warn!("Price {:?} for product {} is not a number", self.price, self.product_id);
            0
        });

        CartProduct {
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            price,
            image: self.image.clone(),
        }
    }
}

/// Quantity input with a floor of 1 and no ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
    value: u32,
}

impl QuantityStepper {
    pub const MIN: u32 = 1;

    pub fn new() -> Self {
        QuantityStepper { value: Self::MIN }
    }

    /// Read a stepper value typed by the user; anything below 1 or not a
    /// number snaps back to 1.
    pub fn parse(raw: &str) -> Self {
        let value = parse_price(raw)
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v >= Self::MIN)
            .unwrap_or(Self::MIN);
        QuantityStepper { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increase(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn decrease(&mut self) {
        if self.value > Self::MIN {
            self.value -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.value = Self::MIN;
    }
}

impl Default for QuantityStepper {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// What confirming the modal puts into the cart
#[derive(Debug, Clone, PartialEq)]
pub struct ModalOrder {
    pub product: CartProduct,
    pub quantity: u32,
}

impl ModalOrder {
    /// Toast text shown after the order lands in the cart
    pub fn added_message(&self) -> String {
        format!("{}x {} ditambahkan!", self.quantity, self.product.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
    working_set: WorkingSet,
    stepper: QuantityStepper,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.working_set
    }

    pub fn stepper(&self) -> QuantityStepper {
        self.stepper
    }

    /// Open for `product`, replacing whatever the previous open left behind.
    pub fn open(&mut self, product: &ProductDescriptor) -> &WorkingSet {
        self.working_set = WorkingSet::from_descriptor(product);
        self.stepper.reset();
        self.state = ModalState::Open;
        &self.working_set
    }

    /// Returns false when the modal was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = ModalState::Closed;
        was_open
    }

    pub fn increase_quantity(&mut self) -> u32 {
        self.stepper.increase();
        self.stepper.value()
    }

    pub fn decrease_quantity(&mut self) -> u32 {
        self.stepper.decrease();
        self.stepper.value()
    }

    /// Adopt a value the user typed into the quantity input.
    pub fn sync_quantity(&mut self, raw: &str) -> u32 {
        self.stepper = QuantityStepper::parse(raw);
        self.stepper.value()
    }

    /// The product and quantity the modal currently holds, leaving it open.
    /// Nothing is returned when the modal is not open.
    pub fn order(&self) -> Option<ModalOrder> {
        self.is_open().then(|| ModalOrder {
            product: self.working_set.to_cart_product(),
            quantity: self.stepper.value(),
        })
    }
}
