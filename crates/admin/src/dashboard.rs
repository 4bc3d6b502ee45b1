//! Dashboard figures.

use serde::Serialize;

use doudou_core::Price;

use crate::category::Category;
use crate::order::{Order, OrderStatus};
use crate::product::AdminProduct;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OrdersByStatus {
    pub new: u32,
    pub processing: u32,
    pub completed: u32,
    pub cancelled: u32,
}

impl OrdersByStatus {
    pub fn get(&self, status: OrderStatus) -> u32 {
        match status {
            OrderStatus::New => self.new,
            OrderStatus::Processing => self.processing,
            OrderStatus::Completed => self.completed,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    fn bump(&mut self, status: OrderStatus) {
        let slot = match status {
            OrderStatus::New => &mut self.new,
            OrderStatus::Processing => &mut self.processing,
            OrderStatus::Completed => &mut self.completed,
            OrderStatus::Cancelled => &mut self.cancelled,
        };
        *slot += 1;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: u32,
    pub active_products: u32,
    pub total_orders: u32,
    pub orders_by_status: OrdersByStatus,
    /// Sum of completed order totals.
    pub total_revenue: Price,
    pub total_categories: u32,
}

impl DashboardStats {
    /// Figures computed locally, used when the backend cannot be reached.
    pub fn compute(products: &[AdminProduct], orders: &[Order], categories: &[Category]) -> Self {
        let mut orders_by_status = OrdersByStatus::default();
        for order in orders {
            orders_by_status.bump(order.status);
        }

        let total_revenue = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .map(|o| o.total)
            .sum();

        Self {
            total_products: count(products.len()),
            active_products: count(products.iter().filter(|p| p.is_active()).count()),
            total_orders: count(orders.len()),
            orders_by_status,
            total_revenue,
            total_categories: count(categories.len()),
        }
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{mock_categories, mock_orders, mock_products};

    #[test]
    fn mock_figures() {
        let stats = DashboardStats::compute(&mock_products(), &mock_orders(), &mock_categories());
        assert_eq!(stats.total_products, 6);
        assert_eq!(stats.active_products, 4);
        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.total_categories, 4);
        assert_eq!(stats.orders_by_status.get(OrderStatus::New), 2);
        assert_eq!(stats.orders_by_status.processing, 1);
        assert_eq!(stats.orders_by_status.completed, 1);
        assert_eq!(stats.orders_by_status.cancelled, 0);
        assert_eq!(stats.total_revenue, Price::from_units(110));
    }

    #[test]
    fn empty_inputs_give_zeroes() {
        assert_eq!(DashboardStats::compute(&[], &[], &[]), DashboardStats::default());
    }
}
