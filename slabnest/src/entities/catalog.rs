use crate::entities::Slab;

/// Read-only collection of slabs in stock. Passed explicitly into packing runs.
#[derive(Clone, Debug, Default)]
pub struct SlabCatalog {
    slabs: Vec<Slab>,
}

impl SlabCatalog {
    pub fn new(slabs: Vec<Slab>) -> Self {
        SlabCatalog { slabs }
    }

    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    /// Available slabs of the given material, in catalog order.
    pub fn candidates<'a>(&'a self, material_id: &'a str) -> impl Iterator<Item = &'a Slab> + 'a {
        self.slabs
            .iter()
            .filter(move |s| s.is_available() && s.material_id == material_id)
    }

    /// Available slabs of the given material that are not in `exclude`, in catalog order.
    pub fn remaining_candidates<'a>(
        &'a self,
        material_id: &'a str,
        exclude: &'a [String],
    ) -> impl Iterator<Item = &'a Slab> + 'a {
        self.candidates(material_id)
            .filter(move |s| !exclude.contains(&s.id))
    }

    pub fn len(&self) -> usize {
        self.slabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slabs.is_empty()
    }
}
