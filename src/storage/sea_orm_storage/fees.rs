use super::SeaOrmStorage;
use crate::entity::fees::{ActiveModel, Column, Entity as Fees};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    fees::{
        entities::{Fee, FeeStatus},
        requests::{CreateFeeRequest, FeeListParams},
        responses::{FeeListResponse, FeeView},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 开具缴费单
    pub async fn create_fee_impl(&self, req: CreateFeeRequest) -> Result<Fee> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            semester: Set(req.semester),
            description: Set(req.description),
            amount_due: Set(req.amount_due),
            amount_paid: Set(0.0),
            status: Set(FeeStatus::Pending.to_string()),
            due_date: Set(req.due_date.timestamp()),
            paid_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("开具缴费单失败: {e}")))?;

        Ok(result.into_fee())
    }

    /// 通过 ID 获取缴费单
    pub async fn get_fee_by_id_impl(&self, id: i64) -> Result<Option<Fee>> {
        let result = Fees::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询缴费单失败: {e}")))?;

        Ok(result.map(|m| m.into_fee()))
    }

    /// 覆盖已缴金额与状态，paid_at 只在缴清时写入
    pub async fn update_fee_payment_impl(
        &self,
        id: i64,
        amount_paid: f64,
        status: FeeStatus,
        paid_at: Option<i64>,
    ) -> Result<Option<Fee>> {
        let existing = self.get_fee_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            amount_paid: Set(amount_paid),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if paid_at.is_some() {
            model.paid_at = Set(paid_at);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新缴费单失败: {e}")))?;

        self.get_fee_by_id_impl(id).await
    }

    /// 分页列出缴费单，逾期标记在读取时推导
    pub async fn list_fees_with_pagination_impl(
        &self,
        params: FeeListParams,
    ) -> Result<FeeListResponse> {
        let (page, size) = params.pagination.normalized();
        let now = chrono::Utc::now();

        let mut select = Fees::find();

        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(semester) = params.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        if let Some(ref status) = params.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 逾期 = 未缴清且已过截止日期
        if params.overdue.unwrap_or(false) {
            select = select.filter(
                Condition::all()
                    .add(Column::Status.ne(FeeStatus::Paid.to_string()))
                    .add(Column::DueDate.lt(now.timestamp())),
            );
        }

        select = select.order_by_asc(Column::DueDate);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询缴费单总数失败: {e}")))?;

        let fees = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询缴费单列表失败: {e}")))?;

        let items = fees
            .into_iter()
            .map(|m| {
                let fee = m.into_fee();
                let overdue = fee.is_overdue(now);
                FeeView { fee, overdue }
            })
            .collect();

        Ok(FeeListResponse {
            items,
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 学生的全部缴费单，按截止日期排序
    pub async fn list_fees_by_student_impl(&self, student_id: i64) -> Result<Vec<Fee>> {
        let fees = Fees::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::DueDate)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生缴费单失败: {e}")))?;

        Ok(fees.into_iter().map(|m| m.into_fee()).collect())
    }
}
