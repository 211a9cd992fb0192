/*!
 * WebSocket 实时推送服务
 *
 * 客户端通过以下 URL 连接：
 * ```text
 * ws://host/api/v1/ws?token=<access_token>
 * ```
 *
 * 连接建立后自动加入以下频道：
 * - 用户频道：定向推送通知
 * - 角色房间（`role:<role>`）：按角色广播业务事件
 * - 课程房间（`course:<id>`）：所授课程或已选课程的业务事件
 *
 * ## 消息格式
 *
 * ### 服务端推送
 * ```json
 * {
 *     "type": "notification",
 *     "payload": {
 *         "id": 42,
 *         "notification_type": "assignment_created",
 *         "title": "新作业发布",
 *         "content": "《数据结构》作业已发布",
 *         "reference_type": "assignment",
 *         "reference_id": 7,
 *         "created_at": "2026-08-29T12:00:00Z"
 *     }
 * }
 * ```
 *
 * ### 业务事件
 * ```json
 * {"type": "event", "topic": "attendance_marked", "payload": {"course_id": 3, "date": "2026-08-29"}}
 * ```
 *
 * ### 心跳
 * ```json
 * {"type": "ping"}
 * {"type": "pong"}
 * ```
 */

use actix_ws::Message;
use dashmap::DashMap;
use futures_util::StreamExt;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::models::notifications::entities::Notification;
use crate::models::users::entities::UserRole;

/// 全局连接管理器
static CONNECTION_MANAGER: Lazy<ConnectionManager> = Lazy::new(ConnectionManager::new);

/// WebSocket 消息类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// 通知消息
    Notification { payload: NotificationPayload },
    /// 业务事件广播
    Event {
        topic: String,
        payload: serde_json::Value,
    },
    /// 心跳请求
    Ping,
    /// 心跳响应
    Pong,
    /// 连接成功
    Connected { user_id: i64 },
    /// 错误消息
    Error { message: String },
}

/// 通知载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub id: i64,
    pub notification_type: String,
    pub title: String,
    pub content: Option<String>,
    pub reference_type: Option<String>,
    pub reference_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Notification> for NotificationPayload {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            notification_type: n.notification_type.to_string(),
            title: n.title,
            content: n.content,
            reference_type: n.reference_type.map(|r| r.to_string()),
            reference_id: n.reference_id,
            created_at: n.created_at,
        }
    }
}

/// 连接管理器
pub struct ConnectionManager {
    /// 用户 ID -> 广播发送器
    connections: DashMap<i64, broadcast::Sender<WsMessage>>,
    /// 房间名 -> 广播发送器
    rooms: DashMap<String, broadcast::Sender<WsMessage>>,
}

impl ConnectionManager {
    fn new() -> Self {
        Self {
            connections: DashMap::new(),
            rooms: DashMap::new(),
        }
    }

    /// 获取全局实例
    pub fn get() -> &'static Self {
        &CONNECTION_MANAGER
    }

    /// 注册用户连接，返回发送端与订阅端
    pub fn register(
        &self,
        user_id: i64,
    ) -> (broadcast::Sender<WsMessage>, broadcast::Receiver<WsMessage>) {
        let entry = self.connections.entry(user_id).or_insert_with(|| {
            let (tx, _) = broadcast::channel(100);
            tx
        });
        (entry.clone(), entry.subscribe())
    }

    /// 加入房间
    pub fn join_room(&self, room: &str) -> broadcast::Receiver<WsMessage> {
        let entry = self.rooms.entry(room.to_string()).or_insert_with(|| {
            let (tx, _) = broadcast::channel(100);
            tx
        });
        entry.subscribe()
    }

    /// 移除用户连接
    pub fn unregister(&self, user_id: i64) {
        // 只有当没有订阅者时才移除
        if let Some(entry) = self.connections.get(&user_id)
            && entry.receiver_count() == 0
        {
            self.connections.remove(&user_id);
        }
        self.rooms
            .retain(|_, sender| sender.receiver_count() > 0);
    }

    /// 向指定用户发送消息
    pub fn send_to_user(&self, user_id: i64, message: WsMessage) -> bool {
        if let Some(sender) = self.connections.get(&user_id) {
            sender.send(message).is_ok()
        } else {
            false
        }
    }

    /// 向房间内所有连接广播
    pub fn broadcast_to_room(&self, room: &str, message: WsMessage) {
        if let Some(sender) = self.rooms.get(room) {
            let _ = sender.send(message);
        }
    }

    /// 推送通知给用户
    pub fn push_notification(&self, user_id: i64, notification: Notification) {
        let message = WsMessage::Notification {
            payload: NotificationPayload::from(notification),
        };
        self.send_to_user(user_id, message);
    }

    /// 获取在线用户数
    pub fn online_count(&self) -> usize {
        self.connections
            .iter()
            .filter(|entry| entry.receiver_count() > 0)
            .count()
    }

    /// 检查用户是否在线
    pub fn is_online(&self, user_id: i64) -> bool {
        self.connections
            .get(&user_id)
            .is_some_and(|s| s.receiver_count() > 0)
    }
}

/// 角色房间名
pub fn role_room(role: &UserRole) -> String {
    format!("role:{role}")
}

/// 课程房间名
pub fn course_room(course_id: i64) -> String {
    format!("course:{course_id}")
}

/// WebSocket 服务
pub struct RealtimeService;

impl RealtimeService {
    /// 处理 WebSocket 连接
    pub async fn handle_connection(
        user_id: i64,
        role: UserRole,
        course_ids: Vec<i64>,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        info!("WebSocket connected for user: {}", user_id);

        // 注册用户频道，房间消息统一转发到用户频道
        let manager = ConnectionManager::get();
        let (tx, mut rx) = manager.register(user_id);

        let mut rooms = vec![role_room(&role)];
        rooms.extend(course_ids.into_iter().map(course_room));

        let mut forwarders = Vec::with_capacity(rooms.len());
        for room in rooms {
            let mut room_rx = manager.join_room(&room);
            let tx = tx.clone();
            forwarders.push(tokio::spawn(async move {
                loop {
                    match room_rx.recv().await {
                        Ok(msg) => {
                            let _ = tx.send(msg);
                        }
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            warn!("Room {} lagged by {} messages", room, n);
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            }));
        }

        // 发送连接成功消息
        let connected_msg = WsMessage::Connected { user_id };
        if let Ok(json) = serde_json::to_string(&connected_msg) {
            let _ = session.text(json).await;
        }

        // 心跳间隔
        let heartbeat_interval = std::time::Duration::from_secs(30);
        let mut heartbeat = tokio::time::interval(heartbeat_interval);

        loop {
            tokio::select! {
                // 处理来自客户端的消息
                msg = stream.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            if let Ok(ws_msg) = serde_json::from_str::<WsMessage>(&text) {
                                match ws_msg {
                                    WsMessage::Ping => {
                                        let pong = serde_json::to_string(&WsMessage::Pong)
                                            .unwrap_or_else(|_| r#"{"type":"pong"}"#.to_string());
                                        if session.text(pong).await.is_err() {
                                            break;
                                        }
                                    }
                                    _ => {
                                        debug!("Received message from user {}: {:?}", user_id, ws_msg);
                                    }
                                }
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            if session.pong(&data).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => {
                            info!("WebSocket closed for user: {}", user_id);
                            break;
                        }
                        Some(Err(e)) => {
                            warn!("WebSocket error for user {}: {:?}", user_id, e);
                            break;
                        }
                        _ => {}
                    }
                }

                // 定向推送
                msg = rx.recv() => {
                    match msg {
                        Ok(ws_msg) => {
                            if let Ok(json) = serde_json::to_string(&ws_msg)
                                && session.text(json).await.is_err() {
                                    break;
                                }
                        }
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            warn!("WebSocket for user {} lagged by {} messages", user_id, n);
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            break;
                        }
                    }
                }

                // 心跳
                _ = heartbeat.tick() => {
                    if session.ping(b"").await.is_err() {
                        break;
                    }
                }
            }
        }

        // 清理连接
        for handle in forwarders {
            handle.abort();
        }
        drop(rx);
        ConnectionManager::get().unregister(user_id);
        info!("WebSocket disconnected for user: {}", user_id);
    }
}

/// 辅助函数：向用户推送通知
pub fn push_notification_to_user(user_id: i64, notification: Notification) {
    ConnectionManager::get().push_notification(user_id, notification);
}

/// 辅助函数：向课程房间广播业务事件
pub fn push_event_to_course(course_id: i64, topic: &str, payload: serde_json::Value) {
    let message = WsMessage::Event {
        topic: topic.to_string(),
        payload,
    };
    ConnectionManager::get().broadcast_to_room(&course_room(course_id), message);
}

/// 辅助函数：向角色房间广播业务事件
pub fn push_event_to_role(role: &UserRole, topic: &str, payload: serde_json::Value) {
    let message = WsMessage::Event {
        topic: topic.to_string(),
        payload,
    };
    ConnectionManager::get().broadcast_to_room(&role_room(role), message);
}

/// 辅助函数：获取在线用户数
pub fn get_online_count() -> usize {
    ConnectionManager::get().online_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_names() {
        assert_eq!(role_room(&UserRole::Student), "role:student");
        assert_eq!(role_room(&UserRole::Admin), "role:admin");
        assert_eq!(course_room(7), "course:7");
    }

    #[test]
    fn test_send_to_offline_user() {
        let manager = ConnectionManager::new();
        assert!(!manager.send_to_user(999, WsMessage::Ping));
        assert!(!manager.is_online(999));
        assert_eq!(manager.online_count(), 0);
    }

    #[test]
    fn test_register_and_broadcast() {
        let manager = ConnectionManager::new();
        let (_tx, mut rx) = manager.register(1);
        assert!(manager.is_online(1));

        assert!(manager.send_to_user(1, WsMessage::Connected { user_id: 1 }));
        match rx.try_recv() {
            Ok(WsMessage::Connected { user_id }) => assert_eq!(user_id, 1),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_room_broadcast() {
        let manager = ConnectionManager::new();
        let mut rx = manager.join_room("role:student");

        manager.broadcast_to_room(
            "role:student",
            WsMessage::Event {
                topic: "attendance_marked".to_string(),
                payload: serde_json::json!({"course_id": 3}),
            },
        );

        match rx.try_recv() {
            Ok(WsMessage::Event { topic, .. }) => assert_eq!(topic, "attendance_marked"),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
