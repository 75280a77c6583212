// Domain layer: 基因記錄模型、種子資料與對外介面 (ports)

pub mod model;
pub mod ports;
pub mod seed;
