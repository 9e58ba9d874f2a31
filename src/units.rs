#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct RowsCount(pub u32);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct ColumnsCount(pub u32);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

/// Side length in pixels of one rendered maze cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellPixels(pub u32);
