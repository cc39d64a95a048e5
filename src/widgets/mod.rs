mod data_table;
mod gradient_background;
mod gradient_card;
mod table_skeleton;

pub use data_table::{ColumnDef, DataTable};
pub use gradient_background::GradientBackground;
pub use gradient_card::GradientCard;
pub use table_skeleton::TableSkeleton;
