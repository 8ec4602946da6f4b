//! Pattern 1: Builder Pattern with a Director
//! A house assembled step by step, driven by fixed or caller-supplied recipes.

use thiserror::Error;

// ============================================================================
// The Product
// ============================================================================

/// A house described by its main components.
///
/// Pure value holder: any subset of the fields may be unset at any time, and
/// nothing links one component to another. The builder creates it empty and
/// fills it in field by field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct House {
    pub foundation: Option<String>,
    pub structure: Option<String>,
    pub roof: Option<String>,
    pub interior: Option<String>,
}

// ============================================================================
// The Builder Interface
// ============================================================================

/// Capability set for building the parts of a house.
///
/// Implementations own exactly one in-progress [`House`] at a time. The
/// [`Director`] drives any implementation through this trait.
pub trait HouseBuilder {
    /// Builds the foundation of the house.
    fn build_foundation(&mut self);

    /// Builds the main structure of the house.
    fn build_structure(&mut self);

    /// Builds the roof of the house.
    fn build_roof(&mut self);

    /// Builds the interior of the house.
    fn build_interior(&mut self);

    /// Discards the house under construction and starts over empty.
    fn reset(&mut self);

    /// Hands the current house to the caller and starts a fresh one.
    ///
    /// This is a destructive read: the builder keeps no reference to the
    /// returned house, and a second immediate call returns an empty house.
    fn finalize(&mut self) -> House;
}

// ============================================================================
// A Concrete Builder
// ============================================================================

/// Builds a standard house out of fixed materials.
///
/// Each step is idempotent and the steps may run in any order; a subset of
/// calls produces a house with exactly those components set.
#[derive(Debug, Default)]
pub struct StandardHouseBuilder {
    house: House,
}

impl StandardHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for StandardHouseBuilder {
    fn build_foundation(&mut self) {
        self.house.foundation = Some("Concrete foundation".to_string());
    }

    fn build_structure(&mut self) {
        self.house.structure = Some("Wooden structure".to_string());
    }

    fn build_roof(&mut self) {
        self.house.roof = Some("Shingle roof".to_string());
    }

    fn build_interior(&mut self) {
        self.house.interior = Some("Standard interior".to_string());
    }

    fn reset(&mut self) {
        self.house = House::default();
    }

    fn finalize(&mut self) -> House {
        // take() moves the finished house out and leaves a fresh empty one
        // behind, so the caller gets exclusive ownership of the result.
        std::mem::take(&mut self.house)
    }
}

// ============================================================================
// The Director
// ============================================================================

/// Error returned by [`Director`] methods that need a bound builder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectorError {
    #[error("Builder not set.")]
    BuilderNotSet,
}

/// Drives a [`HouseBuilder`] through named construction recipes.
///
/// The director decides the order of the building steps; the builder decides
/// what each step produces. It holds the builder as a trait object, so any
/// implementation can be substituted. It never keeps a house of its own:
/// reading the product always delegates to the builder's
/// [`finalize`](HouseBuilder::finalize).
#[derive(Default)]
pub struct Director {
    builder: Option<Box<dyn HouseBuilder>>,
}

impl Director {
    /// Creates a director with no builder bound yet.
    pub fn new() -> Self {
        Self { builder: None }
    }

    /// Creates a director already bound to a builder.
    pub fn with_builder(builder: Box<dyn HouseBuilder>) -> Self {
        Self {
            builder: Some(builder),
        }
    }

    /// Binds or replaces the builder the recipes run against.
    pub fn set_builder(&mut self, builder: Box<dyn HouseBuilder>) {
        self.builder = Some(builder);
    }

    fn builder_mut(&mut self) -> Result<&mut (dyn HouseBuilder + 'static), DirectorError> {
        self.builder.as_deref_mut().ok_or(DirectorError::BuilderNotSet)
    }

    /// Builds just the essentials: a foundation and a structure.
    pub fn build_minimal_viable_house(&mut self) -> Result<(), DirectorError> {
        let builder = self.builder_mut()?;
        builder.build_foundation();
        builder.build_structure();
        Ok(())
    }

    /// Runs every building step in the canonical order.
    pub fn build_full_featured_house(&mut self) -> Result<(), DirectorError> {
        let builder = self.builder_mut()?;
        builder.build_foundation();
        builder.build_structure();
        builder.build_roof();
        builder.build_interior();
        Ok(())
    }

    /// Lets the caller pick the steps: the closure receives the bound builder
    /// and may call any subset of its operations in any order.
    ///
    /// The bound-builder check happens before the closure runs.
    pub fn build_custom_house<F>(&mut self, build_action: F) -> Result<(), DirectorError>
    where
        F: FnOnce(&mut dyn HouseBuilder),
    {
        let builder = self.builder_mut()?;
        build_action(builder);
        Ok(())
    }

    /// Takes the current house from the bound builder.
    ///
    /// Delegates to [`finalize`](HouseBuilder::finalize), so every read is
    /// destructive: reading twice in a row yields the built house once and an
    /// empty house the second time.
    pub fn house(&mut self) -> Result<House, DirectorError> {
        Ok(self.builder_mut()?.finalize())
    }
}

// ============================================================================
// Tests
// ============================================================================
